use charge_sandbox::app;

fn main() -> eframe::Result<()> {
    app::run()
}
