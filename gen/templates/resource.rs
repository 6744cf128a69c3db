#![cfg(any())]
{% if no_update %}
{% for a in attributes if a.write_changes_only %}
{{ fail("write_changes_only on '{}' has no effect: '{}' has no update", a.tf_name, name) }}
{% endfor %}
{% endif %}
{% set create_call = "client.put" if put_create else "client.post" %}
//template:begin header
// Code generated by provider-gen. Edit only outside template sections.
//template:end header

//template:begin imports
use crate::client::{Client, ClientError};
use crate::provider::model_{{ tf_name }}::{{ type_name }};
//template:end imports

//template:begin resource
/// {{ res_description }}
pub struct {{ type_name }}Resource;

impl {{ type_name }}Resource {
    pub const TYPE_NAME: &'static str = "{{ provider }}_{{ tf_name }}";
    pub const PATH: &'static str = "{{ rest_endpoint }}";
{% if minimum_version is not none %}
    pub const MINIMUM_VERSION: &'static str = "{{ minimum_version }}";
{% endif %}
    /// Attributes whose change forces the object to be replaced.
    pub const REQUIRES_REPLACE: &'static [&'static str] = &[{% for a in attributes if a.requires_replace %}"{{ a.tf_name }}"{% if not loop.last %}, {% endif %}{% endfor %}];
}
//template:end resource

//template:begin create
impl {{ type_name }}Resource {
    pub fn create(client: &Client, plan: &{{ type_name }}) -> Result<{{ type_name }}, ClientError> {
{% if id_from_query_path is not none %}
        {{ create_call }}(Self::PATH, &plan.to_body())?;
        let res = client.get(Self::PATH, &[])?;
        let id = res
            .pointer("/{{ id_from_query_path }}")
{% else %}
        let res = {{ create_call }}(Self::PATH, &plan.to_body())?;
        let id = res
            .pointer("/response/id")
{% endif %}
            .and_then(|v| v.as_str())
            .ok_or_else(|| ClientError::NotFound(Self::TYPE_NAME.to_string()))?;
        let mut state = plan.clone();
        state.id = Some(id.to_string());
        Ok(state)
    }
}
//template:end create

//template:begin update
impl {{ type_name }}Resource {
{% if no_update %}
    /// Every attribute requires replacement; update only carries state over.
    pub fn update(_client: &Client, _state: &{{ type_name }}, plan: &{{ type_name }}) -> Result<{{ type_name }}, ClientError> {
        Ok(plan.clone())
    }
{% else %}
    pub fn update(client: &Client, state: &{{ type_name }}, plan: &{{ type_name }}) -> Result<{{ type_name }}, ClientError> {
        let id = state.id.clone().unwrap_or_default();
        let mut body = plan.to_body();
{% for a in attributes if a.write_changes_only %}
        if plan.{{ a.tf_name }} == state.{{ a.tf_name }} {
            body.as_object_mut().map(|o| o.remove("{{ a.model_name }}"));
        }
{% endfor %}
        client.put(&format!("{}/{}", Self::PATH, id), &body)?;
        let mut next = plan.clone();
        next.id = Some(id);
        Ok(next)
    }
{% endif %}
}
//template:end update

//template:begin delete
impl {{ type_name }}Resource {
{% if no_delete %}
    /// The API cannot delete this object; removal only drops it from state.
    pub fn delete(_client: &Client, _state: &{{ type_name }}) -> Result<(), ClientError> {
        Ok(())
    }
{% else %}
    pub fn delete(client: &Client, state: &{{ type_name }}) -> Result<(), ClientError> {
        let id = state.id.clone().unwrap_or_default();
{% if has_resource_id(attributes) %}
        // Identity of nested objects is part of the parent path.
{% endif %}
        client.delete(&format!("{}/{}", Self::PATH, id))
    }
{% endif %}
}
//template:end delete

//template:begin import
impl {{ type_name }}Resource {
    /// Import identifier with {{ import_parts(attributes) }} comma-separated part(s).
    pub fn import(id: &str) -> Result<{{ type_name }}, ClientError> {
        let parts: Vec<&str> = id.split(',').collect();
        if parts.len() != {{ import_parts(attributes) }} {
            return Err(ClientError::InvalidImportId(id.to_string()));
        }
        let mut state = {{ type_name }}::default();
{% for a in attributes if a.reference or a.id %}
{% if a["type"] == "String" %}
        state.{{ a.tf_name }} = Some(parts[{{ loop.index0 }}].to_string());
{% else %}
        state.{{ a.tf_name }} = parts[{{ loop.index0 }}].parse().ok();
{% endif %}
{% endfor %}
        state.id = Some(parts[{{ subtract(import_parts(attributes), 1) }}].to_string());
        Ok(state)
    }
}
//template:end import
