fn main() {
    #[cfg(target_arch = "wasm32")]
    ehospital_frontend::boot();
}
