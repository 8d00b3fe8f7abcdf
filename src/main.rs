use std::process::ExitCode;

use webp_to_png::action::cli::process_args;

fn main() -> ExitCode {
    match process_args() {
        Ok(output) => {
            log::info!("程式執行完成，目錄：{}，共轉換 {} 個檔案", output.work_dir.display(), output.converted.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("轉換中止：{}", e);
            ExitCode::FAILURE
        }
    }
}
