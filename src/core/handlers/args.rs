//! Literal descriptors for translation call arguments.
//!
//! The driver converts each argument expression into a [`CallArg`] before a
//! handler sees it, so handlers validate shapes without touching the AST.

/// Shape of one call argument (or one array element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    /// A string literal with its cooked value.
    Str(String),
    /// An array literal, elements in source order.
    Array(Vec<CallArg>),
    /// A spread element: `...values`.
    Spread,
    /// An array hole: the empty slot in `[a, , b]`.
    Hole,
    /// Any other expression. Its value is only known at runtime.
    Expr,
}

impl CallArg {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CallArg::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Elements of an array literal whose length is statically known.
    ///
    /// Arrays containing a spread element have no static length.
    pub fn as_fixed_array(&self) -> Option<&[CallArg]> {
        match self {
            CallArg::Array(elems) if !elems.contains(&CallArg::Spread) => Some(elems),
            _ => None,
        }
    }

    /// Strings of a non-empty array literal made only of string literals.
    pub fn as_string_array(&self) -> Option<Vec<String>> {
        let elems = self.as_fixed_array()?;
        if elems.is_empty() {
            return None;
        }
        elems
            .iter()
            .map(|elem| elem.as_str().map(str::to_owned))
            .collect()
    }
}

/// Read a string literal argument. Spread arguments never qualify.
pub(super) fn string_at(args: &[CallArg], idx: usize) -> Option<&str> {
    args.get(idx).and_then(CallArg::as_str)
}

/// Outcome of reading the optional runtime-arguments slot.
pub(super) enum RuntimeArgs<'a> {
    Absent,
    Present(&'a [CallArg]),
    Invalid,
}

pub(super) fn runtime_args_at(args: &[CallArg], idx: usize) -> RuntimeArgs<'_> {
    match args.get(idx) {
        None => RuntimeArgs::Absent,
        Some(arg) => match arg.as_fixed_array() {
            Some(elems) => RuntimeArgs::Present(elems),
            None => RuntimeArgs::Invalid,
        },
    }
}
