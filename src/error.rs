pub type PromoResult<T> = Result<T, PromoError>;

#[derive(thiserror::Error, Debug)]
pub enum PromoError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("timeline error: {0}")]
    Timeline(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PromoError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            PromoError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            PromoError::timeline("x")
                .to_string()
                .contains("timeline error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = PromoError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
