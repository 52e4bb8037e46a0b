//! The [`Element`] bound for view element types.

/// A trivially-copyable type that can live inside a view.
///
/// Views never run destructors and copy elements bitwise, so every
/// element type must be `Copy`. [`Element::ZERO`] is the value written
/// by `clear()` on mutable views.
pub trait Element: Copy + 'static {
    /// The zero value of this type.
    const ZERO: Self;
}

macro_rules! impl_element {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl Element for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_element! {
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    f32 => 0.0,
    f64 => 0.0,
    bool => false,
    char => '\0',
}

impl<T: Element, const N: usize> Element for [T; N] {
    const ZERO: Self = [T::ZERO; N];
}
