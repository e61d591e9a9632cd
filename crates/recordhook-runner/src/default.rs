//! Built-in processing used when a run has no primary override.

/// The main step a runner performs when the caller supplies no override.
///
/// The runner treats this as an external collaborator: it calls
/// [`process`](Self::process) and returns its outcome untouched.
/// Closures of shape `Fn(&mut R) -> Result<(), E>` implement it directly.
pub trait DefaultProcessing<R> {
    /// Error produced by processing. Hooks of the same run share this type.
    type Error;

    /// Processes the record.
    fn process(&self, record: &mut R) -> Result<(), Self::Error>;
}

impl<R, E, F> DefaultProcessing<R> for F
where
    F: Fn(&mut R) -> Result<(), E>,
{
    type Error = E;

    fn process(&self, record: &mut R) -> Result<(), E> {
        self(record)
    }
}
