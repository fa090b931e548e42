//! Error macros for stepsearch

/// Return early with an invalid node error
#[macro_export]
macro_rules! bail_invalid_node {
    ($role:expr, $token:expr) => {
        return Err($crate::error::SearchError::invalid_node($role, $token))
    };
}

/// Return early with an invalid graph error
#[macro_export]
macro_rules! bail_invalid_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::SearchError::invalid_graph(format!($($arg)*)))
    };
}

/// Return early with a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::SearchError::UsageError($msg.to_string()))
    };
}
