use crate::InitConfig;

/// Application entry point.
///
/// `init` takes `self` by value, so a loader can start an application at
/// most once.
pub trait Application<M> {
    type Output;

    fn init(self, config: InitConfig<M>) -> Self::Output;
}
