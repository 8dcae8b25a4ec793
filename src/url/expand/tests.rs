use std::collections::{BTreeMap, HashMap};

use crate::url::{ExpandOptions, ListEncoding, QueryItem, QueryValue, expand_query, expand_value};

fn items(pairs: &[(&str, &str)]) -> Vec<QueryItem> {
	pairs.iter().map(|(name, value)| QueryItem::new(*name, *value)).collect()
}

fn query(entries: Vec<(&str, QueryValue)>) -> HashMap<String, QueryValue> {
	entries.into_iter().map(|(key, value)| (key.to_owned(), value)).collect()
}

#[test]
fn booleans_render_as_one_and_zero() {
	let input = query(vec![("a", true.into()), ("b", false.into())]);
	let out = expand_query(&input, &ExpandOptions::default());
	assert_eq!(out, items(&[("a", "1"), ("b", "0")]));
}

#[test]
fn floats_use_shortest_decimal() {
	let input = query(vec![("n", 238.6_f64.into()), ("whole", 3.0_f64.into()), ("half", 0.5_f64.into())]);
	let out = expand_query(&input, &ExpandOptions::default());
	assert_eq!(out, items(&[("half", "0.5"), ("n", "238.6"), ("whole", "3")]));
}

#[test]
fn extreme_floats_switch_to_exponent_form() {
	let input = query(vec![
		("huge", 1e300_f64.into()),
		("tiny", 2.5e-7_f64.into()),
		("neg", (-1.5e20_f64).into()),
		("big", 1e15_f64.into()),
		("small", 0.0001_f64.into()),
		("zero", 0.0_f64.into()),
		("nan", f64::NAN.into()),
	]);
	let out = expand_query(&input, &ExpandOptions::default());
	assert_eq!(
		out,
		items(&[
			("big", "1000000000000000"),
			("huge", "1e300"),
			("nan", "NaN"),
			("neg", "-1.5e20"),
			("small", "0.0001"),
			("tiny", "2.5e-7"),
			("zero", "0"),
		])
	);
}

#[test]
fn integers_render_in_decimal() {
	let input = query(vec![("price", 22000_i64.into()), ("delta", QueryValue::Int(-7)), ("max", QueryValue::UInt(u64::MAX))]);
	let out = expand_query(&input, &ExpandOptions::default());
	assert_eq!(out, items(&[("delta", "-7"), ("max", "18446744073709551615"), ("price", "22000")]));
}

#[test]
fn list_elements_keep_order_in_both_modes() {
	let input = query(vec![("p", vec!["y", "x"].into())]);

	let indexed = expand_query(&input, &ExpandOptions::with_list_encoding(ListEncoding::Indexed));
	assert_eq!(indexed, items(&[("p[0]", "y"), ("p[1]", "x")]));

	let unindexed = expand_query(&input, &ExpandOptions::with_list_encoding(ListEncoding::Unindexed));
	assert_eq!(unindexed, items(&[("p[]", "y"), ("p[]", "x")]));
}

#[test]
fn nested_map_keys_are_sorted() {
	let input = query(vec![("u", QueryValue::map([("b", "2"), ("a", "1")]))]);
	let out = expand_query(&input, &ExpandOptions::default());
	assert_eq!(out, items(&[("u[a]", "1"), ("u[b]", "2")]));
}

#[test]
fn map_of_lists_and_list_of_maps_expand_recursively() {
	let phone = QueryValue::map([("office", vec!["123", "456"]), ("mobile", vec!["789"])]);
	let users = QueryValue::List(vec![QueryValue::map([("name", "Ann")]), QueryValue::map([("name", "Bob"), ("age", "40")])]);
	let input = query(vec![("users", users), ("phone", phone)]);

	let out = expand_query(&input, &ExpandOptions::default());
	assert_eq!(
		out,
		items(&[
			("phone[mobile][0]", "789"),
			("phone[office][0]", "123"),
			("phone[office][1]", "456"),
			("users[0][name]", "Ann"),
			("users[1][age]", "40"),
			("users[1][name]", "Bob"),
		])
	);
}

#[test]
fn order_is_independent_of_container_type() {
	let keys = ["zeta", "Alpha", "alpha", "beta", "b", "a1", "a"];

	let hashed: HashMap<String, QueryValue> = keys.iter().map(|key| ((*key).to_owned(), QueryValue::from(*key))).collect();
	let sorted: BTreeMap<String, QueryValue> = keys.iter().rev().map(|key| ((*key).to_owned(), QueryValue::from(*key))).collect();
	let pairs: Vec<(&str, QueryValue)> = keys.iter().map(|key| (*key, QueryValue::from(*key))).collect();

	let opt = ExpandOptions::default();
	let from_hash = expand_query(&hashed, &opt);
	let from_tree = expand_query(&sorted, &opt);
	let from_pairs = expand_query(pairs.iter().map(|(key, value)| (key, value)), &opt);

	let names: Vec<&str> = from_hash.iter().map(|item| item.name.as_str()).collect();
	assert_eq!(names, ["Alpha", "a", "a1", "alpha", "b", "beta", "zeta"]);
	assert_eq!(from_hash, from_tree);
	assert_eq!(from_hash, from_pairs);
}

#[test]
fn empty_containers_emit_nothing() {
	let input = query(vec![("list", QueryValue::List(Vec::new())), ("map", QueryValue::Map(HashMap::new())), ("x", "1".into())]);
	let out = expand_query(&input, &ExpandOptions::default());
	assert_eq!(out, items(&[("x", "1")]));
}

#[test]
fn expand_value_uses_given_key_as_prefix() {
	let value = QueryValue::List(vec![QueryValue::List(vec![true.into(), false.into()])]);
	let out = expand_value("grid", &value, &ExpandOptions::default());
	assert_eq!(out, items(&[("grid[0][0]", "1"), ("grid[0][1]", "0")]));
}
