use crate::ir::ServerId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IrError {
    #[error("no virtual host registered under {id}")]
    UnknownServer { id: ServerId },
}
