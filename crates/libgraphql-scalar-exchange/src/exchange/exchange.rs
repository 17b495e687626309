use crate::exchange::Operation;
use crate::exchange::OperationResult;

/// A stage of an operation pipeline which sees each [`Operation`] on its way
/// to the transport and each [`OperationResult`] on its way back.
pub trait Exchange {
    type Error;

    /// Rewrites an outbound operation before it is forwarded.
    fn map_operation(&self, operation: Operation) -> Operation;

    /// Rewrites an inbound result before it is handed back to the caller.
    fn map_result(
        &self,
        result: OperationResult,
    ) -> Result<OperationResult, Self::Error>;

    /// Runs each of `operations` through this stage, handing the mapped
    /// operation to `forward` and mapping whatever result it returns.
    ///
    /// Operations are pulled one at a time as the returned iterator is
    /// consumed. Exactly one item is produced per operation, in order.
    fn run<'a, I, F>(
        &'a self,
        operations: I,
        mut forward: F,
    ) -> impl Iterator<Item = Result<OperationResult, Self::Error>> + 'a
    where
        I: IntoIterator<Item = Operation>,
        I::IntoIter: 'a,
        F: FnMut(Operation) -> OperationResult + 'a,
        Self: Sized,
    {
        operations.into_iter().map(move |operation| {
            let result = forward(self.map_operation(operation));
            self.map_result(result)
        })
    }
}
