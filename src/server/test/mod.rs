use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};
