use rcw_core::error::format_err_chain;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("parameter not found: {name}")]
    NotFound { name: String },

    #[error("SSM GetParameter error: {0}")]
    GetParameter(String),
}

impl ParamsError {
    /// A failed GetParameter call, with the SDK error's full cause chain.
    pub fn get_parameter(err: &dyn std::error::Error) -> Self {
        Self::GetParameter(format_err_chain(err))
    }
}
