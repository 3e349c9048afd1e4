// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! tabrow {
    // One tab-separated, newline-terminated row.
    // tabrow!(a, b, c) → "a\tb\tc\n"
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push('\t');
            s.push_str($rest);
        )+
        s.push('\n');
        s
    }};
}
