//! The six call-site macros plus their hidden helpers.
//!
//! Each entry point expands to a static-floor check (constant-folds away
//! when the call sits below a `static-threshold-*` feature), a runtime
//! threshold check, and only then the capture/format/write path. A
//! suppressed call evaluates none of its format arguments.

/// Enclosing function name at the expansion site, module path stripped.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.rsplit("::").next().unwrap_or(name)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($severity:expr, $($arg:tt)+) => {{
        let severity = $severity;
        if severity.should_log($crate::STATIC_THRESHOLD) && severity.should_log($crate::threshold())
        {
            $crate::__private::emit(
                severity,
                $crate::__private::CallSite {
                    file: file!(),
                    line: line!(),
                    function: $crate::__function_path!(),
                },
                format_args!($($arg)+),
            );
        }
    }};
}

/// Logs at `Trace` severity.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Trace, $($arg)+) };
}

/// Logs at `Debug` severity.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Debug, $($arg)+) };
}

/// Logs at `Info` severity.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Info, $($arg)+) };
}

/// Logs at `Warning` severity.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Warning, $($arg)+) };
}

/// Logs at `Error` severity. Routes to the error stream.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Error, $($arg)+) };
}

/// Logs at `Fatal` severity. Routes to the error stream; terminating the
/// process is the caller's responsibility.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Fatal, $($arg)+) };
}
