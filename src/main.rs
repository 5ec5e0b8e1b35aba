use plum_checkers::console::console_top::run_stdio_loop;

fn main() -> std::io::Result<()> {
    env_logger::init();
    run_stdio_loop()
}
