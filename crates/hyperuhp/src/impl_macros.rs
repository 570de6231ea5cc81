/// Implements binary operators on references by copying the operands and
/// forwarding to the implementation on values.
macro_rules! impl_forward_bin_ops_to_copy {
    () => {};

    (
        impl $trait:ident for $type:ty { fn $func:ident() }
        $($remainder:tt)*
    ) => {
        impl_forward_bin_ops_to_copy! {
            impl $trait<$type> for $type { fn $func() -> $type }
            $($remainder)*
        }
    };

    (
        impl $trait:ident<$rhs:ty> for $type:ty { fn $func:ident() -> $ret:ty }
        $($remainder:tt)*
    ) => {
        impl<'a> $trait<$rhs> for &'a $type {
            type Output = $ret;

            fn $func(self, rhs: $rhs) -> $ret {
                $trait::$func(*self, rhs)
            }
        }
        impl<'a> $trait<&'a $rhs> for $type {
            type Output = $ret;

            fn $func(self, rhs: &'a $rhs) -> $ret {
                $trait::$func(self, *rhs)
            }
        }
        impl<'a, 'b> $trait<&'b $rhs> for &'a $type {
            type Output = $ret;

            fn $func(self, rhs: &'b $rhs) -> $ret {
                $trait::$func(*self, *rhs)
            }
        }
        impl_forward_bin_ops_to_copy! { $($remainder)* }
    };
}
