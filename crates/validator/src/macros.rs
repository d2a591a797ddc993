//! Macros for declaring predicates with minimal boilerplate.
//!
//! [`validator!`] expands to the struct, its [`Validate`] implementation, a
//! constructor and a factory function. Every built-in rule in
//! [`validators`](crate::validators) is declared with it.
//!
//! [`Validate`]: crate::foundation::Validate
//!
//! # Examples
//!
//! ```
//! use gatekeep_validator::validator;
//! use gatekeep_validator::foundation::{Validate, ValidationError};
//! use serde_json::{Value, json};
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub IsBool for Value;
//!     rule(input) { input.is_boolean() }
//!     error(input) { ValidationError::new("bool", "Value must be a boolean!") }
//!     fn is_bool();
//! }
//!
//! assert!(is_bool().validate(&json!(true)).is_ok());
//! assert!(is_bool().validate(&json!("true")).is_err());
//! ```

/// Creates a complete predicate: struct definition, `Validate`
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Unit validators additionally
/// derive `Copy, PartialEq, Eq, Hash`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub Int for Value;
///     rule(input) { input.is_i64() || input.is_u64() }
///     error(input) { ValidationError::new("int", messages::INT) }
///     fn int();
/// }
/// ```
///
/// **Custom constructor**:
/// ```rust,ignore
/// validator! {
///     pub Min { bound: String } for Value;
///     rule(self, input) { coerce::compare(input, &self.bound) != Some(Ordering::Less) }
///     error(self, input) { ValidationError::new("min", "...") }
///     new(bound: impl Into<String>) { Self { bound: bound.into() } }
///     fn min(bound: impl Into<String>);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub Decimal { precision: Option<u32>, scale: Option<u32> } for Value;
///     rule(self, input) { ... }
///     error(self, input) { ... }
///     new(precision: Option<u32>, scale: Option<u32>) -> RuleError { ... }
///     fn decimal(precision: Option<u32>, scale: Option<u32>) -> RuleError;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Shared `Validate` impl for struct variants ───────────────────────
    (@impl $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };
}
