/// Asserts that an expression matches a pattern, optionally with a guard.
///
/// ```
/// # use folio_utils::assert_matches;
/// assert_matches!(Some(3), Some(x) if *x > 2);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            actual => {
                ::core::panic!("expected `{}`, got {actual:?}", ::core::stringify!($pat))
            }
        }
    };
    ($expr:expr, $pat:pat if $guard:expr) => {{
        let actual = $expr;
        match (&actual) {
            $pat if $guard => (),
            #[allow(unused_variables, reason = "bindings are only used by the guard")]
            $pat => ::core::panic!(
                "expected `{}` to hold for {actual:?}",
                ::core::stringify!($guard)
            ),
            _ => ::core::panic!(
                "expected `{}`, got {actual:?}",
                ::core::stringify!($pat)
            ),
        }
    }};
}
