/// Declares the table of daemon methods.
///
/// Each entry becomes a `const` [`MethodDescriptor`] named after the entry,
/// and all entries are collected into `ALL` in declaration order. A parameter
/// without `= ...` is required; `= Kind(value)` names the [`ParamDefault`]
/// the dispatcher substitutes when the argument is left unset in the middle
/// of the list.
///
/// ```ignore
/// rpc_method_table! {
///     GET_BLOCK => "getblock" (blockhash, verbosity = Int(1));
/// }
/// ```
///
/// [`MethodDescriptor`]: crate::application::json_rpc::core::api::ops::MethodDescriptor
/// [`ParamDefault`]: crate::application::json_rpc::core::api::ops::ParamDefault
macro_rules! rpc_method_table {
    (@default) => {
        ParamDefault::Required
    };

    (@default $kind:ident $(($value:expr))?) => {
        ParamDefault::$kind $(($value))?
    };

    (
        $(
            $(#[$meta:meta])*
            $ident:ident => $wire:literal (
                $( $param:ident $(= $kind:ident $(($value:expr))? )? ),* $(,)?
            );
        )*
    ) => {
        $(
            $(#[$meta])*
            pub const $ident: MethodDescriptor = MethodDescriptor {
                name: $wire,
                params: &[
                    $(
                        ParamSpec {
                            name: stringify!($param),
                            default: rpc_method_table!(@default $($kind $(($value))?)?),
                        }
                    ),*
                ],
            };
        )*

        /// Every method in the table, in declaration order.
        pub const ALL: &[&MethodDescriptor] = &[$(&$ident),*];
    };
}

pub(crate) use rpc_method_table;
