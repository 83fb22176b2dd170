pub const FULL: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "+git.",
    env!("QUICKDO_GIT_COUNT"),
    ".",
    env!("QUICKDO_GIT_SHA"),
    env!("QUICKDO_GIT_DIRTY")
);
