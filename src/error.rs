use core::fmt;

/// Fault that stops the control loop.
///
/// Neither variant is retried; the supervisor restarting the controller is
/// expected to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<S, O> {
    /// Reading a potentiometer failed
    Sensor(S),
    /// Pushing the frame to the pixel bus failed
    Output(O),
}

impl<S: fmt::Debug, O: fmt::Debug> fmt::Display for Error<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(err) => write!(f, "sensor read failed: {:?}", err),
            Self::Output(err) => write!(f, "pixel bus write failed: {:?}", err),
        }
    }
}

impl<S: fmt::Debug, O: fmt::Debug> core::error::Error for Error<S, O> {}
