use super::*;

const JSON: &str = r#"{
	"filterConfig": [
		{
			"filterKey": "labels",
			"optionConnectMark": ",",
			"valueConnectMark": "=",
			"keyPrefix": "",
			"keySuffix": "",
			"valuePrefix": "\"",
			"valueSuffix": "\""
		},
		{ "filterKey": "scope", "optionConnectMark": "&", "valueConnectMark": ":" }
	],
	"options": [
		{ "label": "Pod", "value": "pod", "belongTo": ["labels"], "isOpen": false },
		{ "label": "Namespace", "value": "ns", "belongTo": [{ "label": "scope", "value": "scope" }] }
	]
}"#;

const TOML: &str = r#"
[[filterConfig]]
filterKey = "labels"
optionConnectMark = ","
valueConnectMark = "="
valuePrefix = '"'
valueSuffix = '"'

[[filterConfig]]
filterKey = "scope"
optionConnectMark = "&"
valueConnectMark = ":"

[[options]]
label = "Pod"
value = "pod"
belongTo = ["labels"]

[[options]]
label = "Namespace"
value = "ns"
belongTo = ["scope"]
"#;

#[test]
fn test_parse_json() {
	let options = PanelOptions::from_json_str(JSON).unwrap();
	assert_eq!(options.filter_config.len(), 2);
	assert_eq!(options.filter_config[0].value_prefix, "\"");
	assert_eq!(options.filter_config[1].key_prefix, "");
	assert_eq!(options.options[1].belong_to, vec!["scope".to_string()]);
	assert!(options.validate().is_empty());
}

#[test]
fn test_toml_matches_json() {
	let json = PanelOptions::from_json_str(JSON).unwrap();
	let toml = PanelOptions::from_toml_str(TOML).unwrap();
	assert_eq!(json, toml);
}

#[test]
fn test_missing_sections_default_empty() {
	let options = PanelOptions::from_json_str("{}").unwrap();
	assert!(options.filter_config.is_empty());
	assert!(options.options.is_empty());
}

#[test]
fn test_malformed_json_is_an_error() {
	let err = PanelOptions::from_json_str("{ \"filterConfig\": 3 }").unwrap_err();
	assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_validate_reports_warnings() {
	let options = PanelOptions::new(
		vec![
			FilterGrammar::new("labels"),
			FilterGrammar::new("labels").with_marks(",", ","),
			FilterGrammar::new("bare").with_marks("", ""),
		],
		vec![FilterOption::new("Pod", "pod").belonging_to("pods")],
	);

	assert_eq!(
		options.validate(),
		vec![
			ConfigWarning::DuplicateFilterKey("labels".into()),
			ConfigWarning::SameMarks("labels".into()),
			ConfigWarning::EmptyOptionMark("bare".into()),
			ConfigWarning::EmptyValueMark("bare".into()),
			ConfigWarning::UnknownFilterKey {
				option: "pod".into(),
				filter_key: "pods".into(),
			},
		]
	);
}

#[test]
fn test_panel_options_is_a_catalog() {
	let options = PanelOptions::from_json_str(JSON).unwrap();
	assert_eq!(tagbar_codec::label_for(&options, "ns"), "Namespace");
}
