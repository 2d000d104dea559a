/// Returns `Err(err)` and logs the call site when `assert` does not hold.
///
/// ```ignore
/// validate!(&env, amount > 0, ErrorCode::ZeroAmount, "amount must be positive")?;
/// ```
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!(
                    $env,
                    "Error {} thrown at {}:{}",
                    error_code as u32,
                    soroban_sdk::String::from_str($env, file!()),
                    line!()
                );
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!(
                    $env,
                    "Error {} thrown at {}:{}",
                    error_code as u32,
                    soroban_sdk::String::from_str($env, file!()),
                    line!()
                );
                soroban_sdk::log!($env, $($arg)+);
                Err(error_code)
            }
        }
    };
}

/// Rejects non-positive amounts with `ZeroAmount`.
#[macro_export]
macro_rules! validate_amount {
    ($env:expr, $($amount:expr),+) => {
        {
            let mut result: $crate::error::YieldResult = Ok(());
            $(
                if result.is_ok() {
                    result = $crate::validate!(
                        $env,
                        $amount > 0,
                        $crate::error::ErrorCode::ZeroAmount,
                        "amount must be positive"
                    );
                }
            )+
            result
        }
    };
}
