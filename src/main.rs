use encuesta_bienestar::EncuestaApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cuestionario de bienestar emocional")
            .with_inner_size([760.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cuestionario de bienestar emocional",
        options,
        Box::new(|_cc| Ok(Box::new(EncuestaApp::new()))),
    )
}

// Entrada WASM: monta la app sobre el canvas `formulario` de la página.
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No hay window")
            .document()
            .expect("No hay document");

        let canvas = document
            .get_element_by_id("formulario")
            .expect("No existe el canvas 'formulario'")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("'formulario' no es un canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(EncuestaApp::new()))),
            )
            .await
            .expect("No se pudo arrancar la app web");
    });
}
