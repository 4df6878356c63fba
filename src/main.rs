use adhd_quiz::QuestionnaireApp;

#[cfg(not(target_arch = "wasm32"))]
const WINDOW_SIZE: [f32; 2] = [640.0, 560.0];

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = match QuestionnaireApp::new() {
        Ok(app) => app,
        Err(e) => {
            log::error!("No se pudo cargar el cuestionario: {e}");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app.title.clone())
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    let title = app.title.clone();
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
}

// ===== SOLO PARA WEB =====
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");
        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(QuestionnaireApp::new()?))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("No se pudo arrancar eframe: {e:?}");
        }
    });
}
