/// The config for `Processor`
#[derive(Debug, Default)]
pub struct Config {
    /// Log each instruction before executing it
    pub trace: bool,
}
