mod sdl_tests;
