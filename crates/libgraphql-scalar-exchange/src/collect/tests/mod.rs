mod variable_paths_tests;
