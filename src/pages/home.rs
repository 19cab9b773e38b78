use leptos::callback::Callback;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::debug;

use crate::components::force_graph::ForceGraphCanvas;
use crate::graph::{ForceGraphData, ForceNode, MathRandom, gen_random_tree};
use crate::pages::{error_list, query_params};

/// Force-directed sketch: a fresh random tree on a full-screen canvas.
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let params = move || query_params(&query.read());

	let on_node = Callback::new(|node: ForceNode| debug!("{node:?}"));

	view! {
		<ErrorBoundary fallback=|errors| error_list(errors)>
			{move || {
				params()
					.map(|params| {
						let tree = gen_random_tree(params.tree_options(), &mut MathRandom);
						let data = Signal::derive(move || ForceGraphData::from(&tree));
						view! {
							<div class="fullscreen-graph">
								<ForceGraphCanvas data=data fullscreen=true node_canvas_object=on_node />
								<div class="graph-overlay">
									<h1 class="text-foreground text-4xl">"Hello"</h1>
								</div>
							</div>
						}
					})
			}}
		</ErrorBoundary>
	}
}
