use std::io::Write;

use pretty_assertions::assert_eq;
use tagbar_panel::codec::Tag;
use tagbar_panel::{ConfigError, FilterBar, PanelOptions, QueryStore, TagAction, VariableStore};

const OPTIONS: &str = r#"{
	"filterConfig": [
		{
			"filterKey": "labels",
			"optionConnectMark": ",",
			"valueConnectMark": "=",
			"valuePrefix": "\"",
			"valueSuffix": "\""
		},
		{
			"filterKey": "podname",
			"optionConnectMark": "|",
			"valueConnectMark": ":"
		}
	],
	"options": [
		{ "label": "App", "value": "app", "belongTo": ["labels"] },
		{ "label": "Namespace", "value": "namespace", "belongTo": ["labels"] },
		{ "label": "Pod name", "value": "pod", "belongTo": [{ "value": "podname" }] }
	]
}"#;

fn write_options(suffix: &str, content: &str) -> tempfile::NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
	file.write_all(content.as_bytes()).unwrap();
	file
}

#[test]
fn edit_session_round_trips_through_url() {
	let file = write_options(".json", OPTIONS);
	let options = PanelOptions::load(file.path()).unwrap();

	let mut store = QueryStore::parse(
		"https://grafana.local/d/pods?orgId=1&var-labels=app%3D%22web%22&from=now-6h",
	)
	.unwrap();

	let mut bar = FilterBar::load(options.clone(), &store);
	assert_eq!(bar.tags(), &[Tag::new("app", "web")]);

	bar.apply(TagAction::add("namespace", "prod"), &mut store).unwrap();
	bar.apply(TagAction::add("pod", "web-1"), &mut store).unwrap();
	bar.apply(TagAction::edit(0, "app", "api"), &mut store).unwrap();

	assert_eq!(
		store.read("var-labels").as_deref(),
		Some(r#"app="api",namespace="prod""#)
	);
	assert_eq!(store.read("var-podname").as_deref(), Some("pod:web-1"));
	assert_eq!(store.read("orgId").as_deref(), Some("1"));
	assert_eq!(store.refreshes(), 3);

	let reloaded = FilterBar::load(options, &store);
	assert_eq!(reloaded.tags(), bar.tags());
}

#[test]
fn removing_every_tag_clears_variables() {
	let options = PanelOptions::from_json_str(OPTIONS).unwrap();
	let mut store = QueryStore::parse("https://grafana.local/d/pods?var-podname=pod%3Aweb-1&orgId=1").unwrap();
	let mut bar = FilterBar::load(options, &store);

	bar.apply(TagAction::remove("pod", "web-1"), &mut store).unwrap();

	assert!(bar.tags().is_empty());
	assert_eq!(store.url().as_str(), "https://grafana.local/d/pods?orgId=1");
}

#[test]
fn toml_options_load_by_extension() {
	let file = write_options(
		".toml",
		r#"
[[filterConfig]]
filterKey = "labels"
optionConnectMark = ","
valueConnectMark = "="

[[options]]
label = "App"
value = "app"
belongTo = ["labels"]
"#,
	);
	let options = PanelOptions::load(file.path()).unwrap();
	assert_eq!(options.filter_config[0].filter_key, "labels");
	assert_eq!(options.options[0].belong_to, vec!["labels".to_string()]);
}

#[test]
fn missing_options_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("absent.json");
	let err = PanelOptions::load(&path).unwrap_err();
	match err {
		ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("unexpected error: {other}"),
	}
}
