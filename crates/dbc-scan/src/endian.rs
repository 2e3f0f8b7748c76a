//! Byte-order reversal for fixed-width numeric values.
//!
//! The swap works on the raw byte representation, so integers and floats
//! of the same width are handled identically and NaN payloads survive.

/// A value with a fixed-size in-memory byte representation.
pub trait FixedWidth: Copy {
    /// Byte array of `size_of::<Self>()` bytes.
    type Bytes: AsMut<[u8]>;

    /// Native-order bytes of the value.
    fn to_ne_bytes(self) -> Self::Bytes;

    /// Rebuilds a value from native-order bytes.
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_fixed_width {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                type Bytes = [u8; size_of::<$ty>()];

                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }

                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_fixed_width!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Returns `value` with its byte order reversed.
///
/// Byte `i` of the input becomes byte `width - 1 - i` of the output.
/// Applying the swap twice gives back the original bit pattern.
///
/// ```
/// use dbc_scan::endian::swap_endianness;
///
/// assert_eq!(swap_endianness(0x0102_0304_u32), 0x0403_0201);
/// assert_eq!(swap_endianness(swap_endianness(1.5_f64)), 1.5);
/// ```
#[must_use]
pub fn swap_endianness<T: FixedWidth>(value: T) -> T {
    let mut bytes = value.to_ne_bytes();
    reverse_bytes(bytes.as_mut());
    T::from_ne_bytes(bytes)
}

/// Reverses a raw value buffer in place.
///
/// For values held as bytes (e.g. read straight from a file) whose width
/// is only known at runtime.
pub fn reverse_bytes(bytes: &mut [u8]) {
    bytes.reverse();
}
