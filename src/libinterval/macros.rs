// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Each operator is implemented once on `&a op &b`, these macros derive the owned variants from it.
macro_rules! forward_val_val_binop {
  (impl<$t:ident: $(+ $bound:ident)*> $imp:ident for $res:ty, $method:ident -> $out:ty) => {
    impl<$t: $($bound +)*> $imp<$res> for $res {
      type Output = $out;

      fn $method(self, other: $res) -> $out {
        (&self).$method(&other)
      }
    }
  }
}

macro_rules! forward_ref_val_binop {
  (impl<$t:ident: $(+ $bound:ident)*> $imp:ident for $res:ty, $method:ident -> $out:ty) => {
    impl<'a, $t: $($bound +)*> $imp<$res> for &'a $res {
      type Output = $out;

      fn $method(self, other: $res) -> $out {
        self.$method(&other)
      }
    }
  }
}

macro_rules! forward_val_ref_binop {
  (impl<$t:ident: $(+ $bound:ident)*> $imp:ident for $res:ty, $method:ident -> $out:ty) => {
    impl<'b, $t: $($bound +)*> $imp<&'b $res> for $res {
      type Output = $out;

      fn $method(self, other: &'b $res) -> $out {
        (&self).$method(other)
      }
    }
  }
}

macro_rules! forward_all_binop {
  (impl<$t:ident: $(+ $bound:ident)*> $imp:ident for $res:ty, $method:ident -> $out:ty) => {
    forward_val_val_binop!(impl<$t: $(+ $bound)*> $imp for $res, $method -> $out);
    forward_ref_val_binop!(impl<$t: $(+ $bound)*> $imp for $res, $method -> $out);
    forward_val_ref_binop!(impl<$t: $(+ $bound)*> $imp for $res, $method -> $out);
  };
  (impl<$t:ident: $(+ $bound:ident)*> $imp:ident for $res:ty, $method:ident) => {
    forward_all_binop!(impl<$t: $(+ $bound)*> $imp for $res, $method -> $res);
  };
}
