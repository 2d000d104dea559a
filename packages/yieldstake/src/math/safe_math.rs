use num_integer::Integer;
use soroban_sdk::{ log, Env, String };

use crate::error::{ ErrorCode, YieldResult };

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> YieldResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> YieldResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> YieldResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> YieldResult<Self>;
    fn safe_div_ceil(self, rhs: Self, env: &Env) -> YieldResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> YieldResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", String::from_str(env, file!()), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> YieldResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", String::from_str(env, file!()), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> YieldResult<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", String::from_str(env, file!()), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> YieldResult<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", String::from_str(env, file!()), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div_ceil(self, v: $t, env: &Env) -> YieldResult<$t> {
                // checked_div rejects a zero divisor and MIN / -1
                match self.checked_div(v) {
                    Some(_) => Ok(Integer::div_ceil(&self, &v)),
                    None => {
                        log!(env, "Math error thrown at {}:{}", String::from_str(env, file!()), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }
        }
    };
}

checked_impl!(u128);
checked_impl!(u64);
checked_impl!(u32);
checked_impl!(i128);
checked_impl!(i64);
