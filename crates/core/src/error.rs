use thiserror::Error;

use crate::config::ConfigError;
use crate::contact::ContactError;
use crate::section::SectionError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Section(#[from] SectionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Contact(#[from] ContactError),
}
