#![cfg(any())]
//template:begin header
// Code generated by provider-gen. Edit only outside template sections.
//template:end header

//template:begin modules
{% for s in schemas %}
pub mod model_{{ s.tf_name }};
{% if not s.no_data_source %}
pub mod data_source_{{ s.tf_name }};
{% endif %}
{% if not s.no_resource %}
pub mod resource_{{ s.tf_name }};
{% endif %}
{% endfor %}
//template:end modules

//template:begin registry
pub const PROVIDER_NAME: &str = "{{ provider }}";

/// Data source type names served by this provider.
pub const DATA_SOURCES: &[&str] = &[
{% for s in schemas if not s.no_data_source %}
    "{{ provider }}_{{ s.tf_name }}",
{% endfor %}
];

/// Resource type names served by this provider.
pub const RESOURCES: &[&str] = &[
{% for s in schemas if not s.no_resource %}
    "{{ provider }}_{{ s.tf_name }}",
{% endfor %}
];
//template:end registry
