use thiserror::Error;

use crate::core::types::Vec2;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("position ({},{}) outside space bounds {width}x{height}", .position.x, .position.y)]
    OutOfBounds {
        position: Vec2,
        width: f32,
        height: f32,
    },

    #[error("unknown agent: {0:?}")]
    UnknownAgent(crate::core::types::BoidId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("parameter file error: {0}")]
    ParamError(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
