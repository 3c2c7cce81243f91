/// Emits a `tracing::debug!` event if the `tracing` feature is enabled.
macro_rules! log_debug {
    ( $( $arg:tt )* ) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!( $( $arg )* );
        }
    }};
}

/// Emits a `tracing::trace!` event if the `tracing` feature is enabled.
macro_rules! log_trace {
    ( $( $arg:tt )* ) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!( $( $arg )* );
        }
    }};
}
