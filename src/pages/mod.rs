pub mod home;
pub mod not_found;
pub mod relation;

use leptos::prelude::*;
use leptos_router::params::ParamsMap;

use crate::error::ParamError;
use crate::params::TreeParams;

/// Read [`TreeParams`] from the current query string.
fn query_params(query: &ParamsMap) -> Result<TreeParams, ParamError> {
	TreeParams::from_lookup(|key| query.get(key))
}

/// Fallback view listing configuration errors.
fn error_list(errors: ArcRwSignal<Errors>) -> impl IntoView {
	view! {
		<h1>"Uh oh! Something went wrong!"</h1>

		<p>"Errors: "</p>
		<ul>
			{move || {
				errors
					.get()
					.into_iter()
					.map(|(_, e)| view! { <li>{e.to_string()}</li> })
					.collect_view()
			}}
		</ul>
	}
}
