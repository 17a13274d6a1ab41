use leptos::html::Canvas;
use leptos::prelude::*;
use shape_core::{
    grouped_catalog, stored_bool, DisplaySettings, AUTO_ROTATE_KEY, CATALOG, WIREFRAME_KEY,
};
use shape_geom::shape_geometry;
use shape_render::{SettingsCell, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let viewport = Rc::new(RefCell::new(None::<Viewport>));

    // Stored toggles are read once at startup; anything malformed falls back
    // to the defaults.
    let stored = DisplaySettings::from_stored(
        load_setting(WIREFRAME_KEY).as_deref(),
        load_setting(AUTO_ROTATE_KEY).as_deref(),
    );
    let settings = SettingsCell::new(stored);

    let (selected, set_selected) = signal(0usize);
    let (wireframe, set_wireframe) = signal(stored.wireframe);
    let (auto_rotate, set_auto_rotate) = signal(stored.auto_rotate);

    init_viewport(canvas_ref, viewport.clone(), settings.clone(), selected);

    // Selection change: swap the geometry and retint the material. The
    // toggles are untouched.
    {
        let viewport = viewport.clone();
        Effect::new(move |_| {
            let shape = &CATALOG[selected.get()];
            if let Some(viewport) = viewport.borrow_mut().as_mut() {
                viewport.set_geometry(&shape_geometry(shape));
                viewport.set_material(shape.color);
            }
        });
    }

    // Wireframe toggle: flip the material flag in place, persist best-effort.
    {
        let viewport = viewport.clone();
        let settings = settings.clone();
        Effect::new(move |prev: Option<()>| {
            let on = wireframe.get();
            let mut current = settings.get();
            current.wireframe = on;
            settings.set(current);
            if let Some(viewport) = viewport.borrow_mut().as_mut() {
                viewport.set_wireframe(on);
            }
            if prev.is_some() {
                store_setting(WIREFRAME_KEY, on);
            }
        });
    }

    // Auto-rotate toggle: no scene mutation, only the shared cell the frame
    // loop reads each tick.
    {
        let settings = settings.clone();
        Effect::new(move |prev: Option<()>| {
            let on = auto_rotate.get();
            let mut current = settings.get();
            current.auto_rotate = on;
            settings.set(current);
            if prev.is_some() {
                store_setting(AUTO_ROTATE_KEY, on);
            }
        });
    }

    on_cleanup({
        let viewport = viewport.clone();
        move || {
            if let Some(mut viewport) = viewport.borrow_mut().take() {
                viewport.shutdown();
            }
        }
    });

    let catalog_panel = grouped_catalog()
        .iter()
        .map(|group| {
            let buttons = group
                .shapes
                .iter()
                .map(|shape| {
                    let shape = *shape;
                    let index = CATALOG
                        .iter()
                        .position(|s| s.name == shape.name)
                        .unwrap_or(0);
                    let style = format!("color: {}", shape.color.css());
                    view! {
                        <button
                            class:selected=move || selected.get() == index
                            style=style
                            title=shape.description
                            on:click=move |_| set_selected.set(index)
                        >
                            {shape.name}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <section class="category">
                    <h2>{group.name}</h2>
                    <div class="buttons">{buttons}</div>
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="app">
            <aside class="panel">
                <h1>"primula"</h1>
                {catalog_panel}
                <div class="display-settings">
                    <h2>"Display"</h2>
                    <label class="toggle">
                        <input
                            type="checkbox"
                            prop:checked=wireframe
                            on:change=move |ev| set_wireframe.set(event_target_checked(&ev))
                        />
                        <span>"Wireframe"</span>
                    </label>
                    <label class="toggle">
                        <input
                            type="checkbox"
                            prop:checked=auto_rotate
                            on:change=move |ev| set_auto_rotate.set(event_target_checked(&ev))
                        />
                        <span>"Auto-rotate"</span>
                    </label>
                </div>
            </aside>
            <main class="viewport">
                <canvas id="viewport-canvas" node_ref=canvas_ref></canvas>
            </main>
        </div>
    }
}

/// Builds the viewport once the canvas node exists. The node ref fills in
/// after the first render, so the attempt is deferred by one frame; a canvas
/// still missing at that point means "not yet ready" and the attempt is
/// skipped (the owner remounts when the container becomes available).
fn init_viewport(
    canvas_ref: NodeRef<Canvas>,
    viewport: Rc<RefCell<Option<Viewport>>>,
    settings: SettingsCell,
    selected: ReadSignal<usize>,
) {
    request_animation_frame(move || {
        let Some(canvas) = canvas_ref.get() else {
            log("canvas not ready, skipping viewport init");
            return;
        };
        spawn_local(async move {
            // A viewport from a previous mount cycle is torn down first.
            if let Some(mut old) = viewport.borrow_mut().take() {
                old.shutdown();
            }
            match Viewport::new(canvas, settings.clone()).await {
                Ok(mut built) => {
                    let shape = &CATALOG[selected.get_untracked()];
                    built.set_geometry(&shape_geometry(shape));
                    built.set_material(shape.color);
                    built.set_wireframe(settings.get().wireframe);
                    built.attach_resize_listener();
                    built.start();
                    *viewport.borrow_mut() = Some(built);
                }
                Err(err) => {
                    log(&format!("viewport init failed: {err}"));
                }
            }
        });
    });
}

fn local_store() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn load_setting(key: &str) -> Option<String> {
    local_store().and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Fail-open: a failed write leaves the in-memory state authoritative.
fn store_setting(key: &str, value: bool) {
    if let Some(storage) = local_store() {
        let _ = storage.set_item(key, stored_bool(value));
    }
}

fn log(text: &str) {
    web_sys::console::log_1(&text.into());
}
