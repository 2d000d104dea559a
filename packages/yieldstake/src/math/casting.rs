use soroban_sdk::{ log, Env, String };

use crate::error::{ ErrorCode, YieldResult };

pub trait Cast: Sized {
    #[track_caller]
    #[inline(always)]
    fn cast<T: TryFrom<Self>>(self, env: &Env) -> YieldResult<T> {
        match T::try_from(self) {
            Ok(result) => Ok(result),
            Err(_) => {
                log!(env, "Casting error thrown at {}:{}", String::from_str(env, file!()), line!());
                Err(ErrorCode::CastingFailure)
            }
        }
    }
}

impl Cast for u128 {}
impl Cast for u64 {}
impl Cast for u32 {}
impl Cast for i128 {}
impl Cast for i64 {}
