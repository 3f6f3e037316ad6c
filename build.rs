use std::{env, fs, path::Path};
use std::io::{BufRead, BufReader};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("weak_passwords.rs");

    // 读取弱密码列表
    let data_file = "data/weak_passwords.txt";
    let file = fs::File::open(data_file).expect("Failed to open data file");
    let reader = BufReader::new(file);

    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line.expect("Error reading line");
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue; // 跳过空行和注释
        }
        if entry.chars().any(char::is_whitespace) {
            panic!("Invalid data format: {}", line);
        }

        // 使用Debug格式保证转义正确
        entries.push(format!("{:?}", entry));
    }

    // 生成Rust代码
    let code = format!(r#"pub static WEAK_PASSWORDS: [&str; {}] = [{}];"#,
        entries.len(),
        entries.join(", ")
    );

    fs::write(dest_path, code).expect("Failed to write generated file");

    // 确保数据文件变化时重建
    println!("cargo:rerun-if-changed={}", data_file);
}
