use leptos::prelude::*;

use crate::components::bounding_box::BoundingBoxCanvas;
use crate::components::intake_diagram::{
	DiagramData, DiagramLink, DiagramNode, IntakeDiagramCanvas,
};

/// Sample intake process: a treatment chain fed by the river, plus one
/// symbol left unconnected so the Validate button has something to flag.
fn sample_intake_process() -> DiagramData {
	let node = |id: &str, label: &str, x: f64, y: f64| DiagramNode {
		id: id.into(),
		label: Some(label.into()),
		x,
		y,
	};
	let link = |id: &str, source: &str, target: &str| DiagramLink {
		id: id.into(),
		source: Some(source.into()),
		target: Some(target.into()),
	};

	DiagramData {
		nodes: vec![
			node("river", "River", 80.0, 260.0),
			node("intake", "Water intake", 240.0, 180.0),
			node("sedimentation", "Sedimentation tank", 420.0, 120.0),
			node("filtration", "Filtration", 600.0, 180.0),
			node("storage", "Storage", 760.0, 260.0),
			node("floodplain", "Floodplain", 420.0, 380.0),
		],
		links: vec![
			link("c1", "river", "intake"),
			link("c2", "intake", "sedimentation"),
			link("c3", "sedimentation", "filtration"),
			link("c4", "filtration", "storage"),
		],
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let diagram_data = Signal::derive(sample_intake_process);

	view! {
		<ErrorBoundary fallback=|errors| {
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
		}>

			<section class="widget-section">
				<h1>"Intake process diagram"</h1>
				<p class="subtitle">
					"Drag symbols to reposition. Scroll to zoom. Validate flags anything not connected to the river."
				</p>
				<IntakeDiagramCanvas data=diagram_data root="river" width=Some(900.0) height=Some(520.0) />
			</section>

			<section class="widget-section">
				<h1>"Bounding box tool"</h1>
				<p class="subtitle">
					"Drag to draw a box, drag a handle to resize, drag the body to move. Double-click to start over."
				</p>
				<BoundingBoxCanvas width=Some(900.0) height=Some(520.0) />
			</section>
		</ErrorBoundary>
	}
}
