#![cfg(any())]
//template:begin header
// Code generated by provider-gen. Edit only outside template sections.
//template:end header

//template:begin imports
use crate::client::{Client, ClientError};
use crate::provider::model_{{ tf_name }}::{{ type_name }};
//template:end imports

//template:begin dataSource
/// {{ ds_description }}
pub struct {{ type_name }}DataSource;

impl {{ type_name }}DataSource {
    pub const TYPE_NAME: &'static str = "{{ provider }}_{{ tf_name }}";
    pub const PATH: &'static str = "{{ rest_endpoint }}";
{% if doc_category is not none %}
    pub const CATEGORY: &'static str = "{{ doc_category }}";
{% endif %}
}
//template:end dataSource

//template:begin read
impl {{ type_name }}DataSource {
{% if data_source_name_query %}
    /// Look the object up by name, then read it by id.
    pub fn read(client: &Client, name: &str) -> Result<{{ type_name }}, ClientError> {
        let found = client.get(Self::PATH, &[("name", name)])?;
        let id = found
            .pointer("/response/0/id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ClientError::NotFound(name.to_string()))?
            .to_string();
        Self::read_by_id(client, &id)
    }

{% endif %}
    pub fn read_by_id(client: &Client, id: &str) -> Result<{{ type_name }}, ClientError> {
        let res = client.get(&format!("{}/{}", Self::PATH, id), &[])?;
        let mut state = {{ type_name }} {
            id: Some(id.to_string()),
            ..Default::default()
        };
        state.from_body(&res["response"]);
        Ok(state)
    }
}
//template:end read
