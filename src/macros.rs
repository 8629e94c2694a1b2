/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Stamp out a block of items once for every combination of alternatives.
///
/// Every argument before the callback is a list of alternatives.  A list is
/// either written out as `[{...} {...}]`, or is one of the named lists below
/// (`@{field}`, `@{Vn}`, `@{Vn_n}`, `@{Mnn_Mn_Vn_n}`,
/// `@{ref_a}`, `@{ref_b}`).  The final argument
/// defines a local macro `name!(pattern) => { body }`, which is then called
/// with one alternative taken from each list, in order.
///
/// See the tests at the bottom of this file for usage.
macro_rules! gen_each {
    ($($arg:tt)*) => { gen_each_impl!{@lists [$($arg)*] []} };
}

/// implementation detail of `gen_each!`
macro_rules! gen_each_impl {
    //----------------------------
    // Collect the lists.

    // The scalar types that implement `Field`.
    (@lists [@{field} $($rest:tt)*] [$($lists:tt)*])
    => { gen_each_impl!{@lists [$($rest)*] [$($lists)* [
        {f32} {f64}
    ]]} };

    // Vector types.
    (@lists [@{Vn} $($rest:tt)*] [$($lists:tt)*])
    => { gen_each_impl!{@lists [$($rest)*] [$($lists)* [
        {V2} {V3} {V4}
    ]]} };

    // Vector types with their length.
    (@lists [@{Vn_n} $($rest:tt)*] [$($lists:tt)*])
    => { gen_each_impl!{@lists [$($rest)*] [$($lists)* [
        {V2 2} {V3 3} {V4 4}
    ]]} };

    // Square matrix alias, row container, row type, and dimension.
    (@lists [@{Mnn_Mn_Vn_n} $($rest:tt)*] [$($lists:tt)*])
    => { gen_each_impl!{@lists [$($rest)*] [$($lists)* [
        {M22 M2 V2 2} {M33 M3 V3 3} {M44 M4 V4 4}
    ]]} };

    // An operand taken by value or by reference.  Each alternative is
    // `{[lifetime?] [reference?]}`.
    (@lists [@{ref_a} $($rest:tt)*] [$($lists:tt)*])
    => { gen_each_impl!{@lists [$($rest)*] [$($lists)* [
        {[] []} {['a] [&'a]}
    ]]} };

    (@lists [@{ref_b} $($rest:tt)*] [$($lists:tt)*])
    => { gen_each_impl!{@lists [$($rest)*] [$($lists)* [
        {[] []} {['b] [&'b]}
    ]]} };

    (@lists [[$($alt:tt)*] $($rest:tt)*] [$($lists:tt)*])
    => { gen_each_impl!{@lists [$($rest)*] [$($lists)* [$($alt)*]]} };

    // The callback ends the argument list.
    (@lists [$mac:ident!($($pattern:tt)*) => {$($body:tt)*} $(;)*] [$($lists:tt)*])
    => {
        macro_rules! $mac {
            ($($pattern)*) => {$($body)*};
        }
        gen_each_impl!{@walk [$($lists)*] $mac []}
    };

    //----------------------------
    // Walk the product.

    (@walk [] $mac:ident [$($chosen:tt)*])
    => { $mac!{$($chosen)*} };

    // The lists after the first travel through the repetition in `@fan` as a single tt.
    (@walk [[$($alt:tt)*] $($lists:tt)*] $mac:ident $chosen:tt)
    => { gen_each_impl!{@fan [$($alt)*] [$($lists)*] $mac $chosen} };

    (@fan [$($alt:tt)*] $lists:tt $mac:ident $chosen:tt)
    => { $( gen_each_impl!{@pick $alt $lists $mac $chosen} )* };

    (@pick $alt:tt [$($lists:tt)*] $mac:ident [$($chosen:tt)*])
    => { gen_each_impl!{@walk [$($lists)*] $mac [$($chosen)* $alt]} };
}

#[cfg(test)]
mod tests {
    use crate::types::*;

    trait Dim { const DIM: usize; }

    gen_each!{
        @{Vn_n}
        impl_dim!({$Vn:ident $n:tt}) => {
            impl Dim for $Vn { const DIM: usize = $n; }
        }
    }

    trait Pair { fn pair() -> (&'static str, &'static str); }

    gen_each!{
        [{i8 "i8"} {u8 "u8"}]
        [{i16 "i16"} {u16 "u16"} {i32 "i32"}]
        impl_pair!({$A:ident $a:expr} {$B:ident $b:expr}) => {
            impl Pair for ($A, $B) {
                fn pair() -> (&'static str, &'static str) { ($a, $b) }
            }
        }
    }

    #[test]
    fn named_lists() {
        assert_eq!(<V2 as Dim>::DIM, 2);
        assert_eq!(<V3 as Dim>::DIM, 3);
        assert_eq!(<V4 as Dim>::DIM, 4);
    }

    #[test]
    fn every_combination() {
        assert_eq!(<(i8, u16)>::pair(), ("i8", "u16"));
        assert_eq!(<(u8, i32)>::pair(), ("u8", "i32"));
        assert_eq!(<(u8, i16)>::pair(), ("u8", "i16"));
    }
}
