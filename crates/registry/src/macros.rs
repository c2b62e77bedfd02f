/// Defines an extension function and registers it with the builtin set.
///
/// ```ignore
/// function!(NUM_GEOMETRIES, "numGeometries", {
/// 	params: [],
/// 	returns: Integer,
/// 	description: "Number of component geometries"
/// }, handler: num_geometries);
/// ```
#[macro_export]
macro_rules! function {
	($static:ident, $name:literal, {
		params: [$($param:ident),* $(,)?],
		returns: $returns:ident,
		description: $desc:expr
		$(,)?
	}, handler: $handler:expr) => {
		pub static $static: $crate::FunctionDescriptor = $crate::FunctionDescriptor {
			name: $name,
			params: &[$($crate::ValueType::$param),*],
			returns: $crate::ValueType::$returns,
			description: $desc,
			handler: $handler,
		};
		$crate::inventory::submit!($crate::FunctionReg(&$static));
	};
}
