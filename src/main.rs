use curlize::context::Environment;
use curlize::core;
use curlize::status::ExitStatus;

/// Entry point - returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    core::run(args, env)
}
