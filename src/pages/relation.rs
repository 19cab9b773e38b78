use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::graph::{GraphShape, MathRandom, ShapedGraph, gen_random_tree};
use crate::pages::{error_list, query_params};

/// Relation-graph sketch: shows the document handed to a relation widget.
#[component]
pub fn Relation() -> impl IntoView {
	let query = use_query_map();
	let params = move || query_params(&query.read());

	view! {
		<ErrorBoundary fallback=|errors| error_list(errors)>
			{move || {
				params()
					.map(|params| {
						let tree = gen_random_tree(params.tree_options(), &mut MathRandom);
						let shape = params.shape.unwrap_or(GraphShape::Relation);
						let json = ShapedGraph::new(&tree, shape)
							.to_json()
							.unwrap_or_else(|e| format!("failed to serialize graph: {e}"));
						view! {
							<h1 class="text-foreground text-4xl">"Hello"</h1>
							<pre class="graph-json" data-shape=shape.to_string()>{json}</pre>
						}
					})
			}}
		</ErrorBoundary>
	}
}
