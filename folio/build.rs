fn main() {
    // `FOLIO_LOG_PRETTY=1` switches the binary to multi-line log output.
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");
    println!("cargo::rerun-if-env-changed=FOLIO_LOG_PRETTY");
    let pretty = std::env::var("FOLIO_LOG_PRETTY").is_ok_and(|v| v == "1");
    if pretty {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
