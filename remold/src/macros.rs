/// Builds a [`Map`](crate::Map) from `"key" => value` pairs.
///
/// Every value is erased through [`Value::new`](crate::Value::new), so
/// nested `mapping!` calls produce nested mappings and
/// [`Literal::new`](crate::Literal::new) slots in unchanged.
///
/// ```
/// use remold::{Value, mapping};
///
/// let map = mapping! {
///     "name" => String::from("Rosa"),
///     "scores" => mapping! { "math" => 91i64 },
/// };
/// assert_eq!(map.get("name"), Some(&Value::new(String::from("Rosa"))));
/// assert_eq!(map.len(), 2);
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Map::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert($key, $crate::Value::new($value));
        )+
        map
    }};
}
