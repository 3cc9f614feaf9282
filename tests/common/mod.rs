use basic::mach::Runtime;

/// Load and run `source` with `input` as the keyboard. Returns everything
/// printed, followed by the error if the load or the run failed.
pub fn exec(source: &str, input: &str) -> String {
    let mut runtime = Runtime::new(input.as_bytes(), Vec::new());
    runtime.set_seed(1);
    if let Err(error) = runtime.load(source.as_bytes()) {
        return format!("?{}\n", error);
    }
    let result = runtime.run();
    let mut s = String::from_utf8_lossy(runtime.output()).to_string();
    if let Err(error) = result {
        s.push_str(&format!("?{}\n", error));
    }
    s
}

#[allow(dead_code)]
pub fn run(source: &str) -> String {
    exec(source, "")
}
