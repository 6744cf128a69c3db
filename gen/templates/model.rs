#![cfg(any())]
{% macro rust_type(a) %}{% if is_list_set(a) %}{% if a.element_type == "Int64" %}Vec<i64>{% elif a.element_type == "Float64" %}Vec<f64>{% elif a.element_type == "Bool" %}Vec<bool>{% else %}Vec<String>{% endif %}{% elif is_nested_map(a) %}BTreeMap<String, {{ a.type_name }}>{% elif is_nested(a) %}Vec<{{ a.type_name }}>{% elif a["type"] == "Int64" %}i64{% elif a["type"] == "Float64" %}f64{% elif a["type"] == "Bool" %}bool{% elif a["type"] == "Versions" %}Vec<String>{% else %}String{% endif %}{% endmacro %}
{% macro fields(owner, attrs) %}
{% for a in attrs if a.value is none %}
{% if is_nested_map(a) and not a.attributes %}
{{ fail("map attribute '{}' of '{}' needs child attributes", a.tf_name, owner) }}
{% endif %}
{% if a.description is not none %}
    /// {{ a.description }}
{% endif %}
    #[serde(rename = "{{ a.model_name }}", default, skip_serializing_if = "Option::is_none")]
    pub {{ a.tf_name }}: Option<{{ rust_type(a) }}>,
{% endfor %}
{% endmacro %}
//template:begin header
// Code generated by provider-gen. Edit only outside template sections.
//template:end header

//template:begin imports
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
//template:end imports

//template:begin model
/// State of {{ name }} as tracked by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct {{ type_name }} {
    #[serde(skip)]
    pub id: Option<String>,
{{ fields(name, attributes) -}}
}
{% for t in nested_types(attributes) %}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct {{ t.type_name }} {
{{ fields(t.type_name, t.attributes) -}}
}
{% endfor %}
//template:end model

//template:begin toBody
impl {{ type_name }} {
    /// Request body for create and update.
    pub fn to_body(&self) -> Value {
        let mut body = serde_json::to_value(self).unwrap_or(Value::Null);
{% for a in attributes if a.value is not none %}
        body["{{ a.model_name }}"] = json!({{ a.value }});
{% endfor %}
{% for a in attributes if a.write_only %}
        // {{ a.tf_name }} is write-only and never read back
{% endfor %}
        body
    }
}
//template:end toBody

//template:begin fromBody
impl {{ type_name }} {
    /// Refresh state from a read response, keeping the id and write-only values.
    pub fn from_body(&mut self, res: &Value) {
        let Ok(mut fresh) = serde_json::from_value::<{{ type_name }}>(res.clone()) else {
            return;
        };
        fresh.id = self.id.take();
{% for a in attributes if a.write_only and a.value is none %}
        fresh.{{ a.tf_name }} = self.{{ a.tf_name }}.take();
{% endfor %}
        *self = fresh;
    }
}
//template:end fromBody
