/******************************************\
|==========================================|
|          Macro: impl_enum_table          |
|==========================================|
\******************************************/

/// Generates the lookup helpers for a fieldless enum with a `NUM` constant.
///
/// It provides:
/// - `const ALL: [Self; NUM]`: every variant in discriminant order.
/// - `const fn index(&self) -> usize`: the variant's position in `ALL`.
/// - `const fn from_index(index: usize) -> Option<Self>`: the inverse of `index`.
/// - `fn iter()`: a `DoubleEndedIterator` over `ALL`.
///
/// The variants must be listed in declaration order with discriminants `0..NUM`.
#[macro_export]
macro_rules! impl_enum_table {
    ($enum_name:ident, [$($variant:ident),+ $(,)?]) => {
        impl $enum_name {
            #[doc=concat!("Every ", stringify!($enum_name), " in discriminant order")]
            pub const ALL: [Self; Self::NUM] = [$(Self::$variant),+];

            #[doc=concat!("Converts ", stringify!($enum_name), " to primitive type usize")]
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }

            #[doc=concat!("Converts a usize index back into ", stringify!($enum_name))]
            #[inline]
            pub const fn from_index(index: usize) -> Option<Self> {
                if index < Self::NUM {
                    Some(Self::ALL[index])
                } else {
                    None
                }
            }

            #[doc=concat!("Returns iterator for all the elements in ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
                Self::ALL.into_iter()
            }
        }
    };
}

/******************************************\
|==========================================|
|             Macro: impl_op               |
|==========================================|
\******************************************/

/// Implements a binary operator for a single-field tuple struct (`MyStruct(value)`),
/// either against itself or against another type.
#[macro_export]
macro_rules! impl_op {
    ($struct_name:ident, $op_name:ident, $method_name:ident, $op:tt) => {
        impl std::ops::$op_name for $struct_name {
            type Output = Self;

            fn $method_name(self, rhs: Self) -> Self::Output {
                Self(self.0 $op rhs.0)
            }
        }
    };
}

/// Implements an assignment operator on top of the matching binary operator.
#[macro_export]
macro_rules! impl_assign_op {
    ($struct_name:ident, $op_name:ident, $method_name:ident, $op:tt) => {
        impl std::ops::$op_name for $struct_name {
            fn $method_name(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

/******************************************\
|==========================================|
|           Macro: impl_bit_ops            |
|==========================================|
\******************************************/

/// Implements `&`, `|`, `^` and their assignment forms for a bit-set wrapper struct.
#[macro_export]
macro_rules! impl_bit_ops {
    ($struct_name:ident) => {
        $crate::impl_op!($struct_name, BitAnd, bitand, &);
        $crate::impl_op!($struct_name, BitOr, bitor, |);
        $crate::impl_op!($struct_name, BitXor, bitxor, ^);

        $crate::impl_assign_op!($struct_name, BitAndAssign, bitand_assign, &);
        $crate::impl_assign_op!($struct_name, BitOrAssign, bitor_assign, |);
        $crate::impl_assign_op!($struct_name, BitXorAssign, bitxor_assign, ^);
    };
}
