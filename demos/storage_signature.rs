use std::io;

use qcloud::{StorageCredentials, StorageSigner};

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_id = required("QCLOUD_COS_APP_ID")?.parse::<u64>()?;
    let secret_id = required("QCLOUD_COS_SECRET_ID")?;
    let secret_key = required("QCLOUD_COS_SECRET_KEY")?;
    let bucket = required("QCLOUD_COS_BUCKET")?;

    let signer = StorageSigner::new(StorageCredentials::new(app_id, secret_id, secret_key));

    match std::env::var("QCLOUD_COS_REMOTE_PATH") {
        Ok(path) => println!("{}", signer.sign_once(&path, &bucket)),
        Err(_) => {
            let expired_at = std::env::var("QCLOUD_COS_EXPIRED_AT")
                .ok()
                .map(|raw| raw.parse::<i64>())
                .transpose()?
                .unwrap_or(0);
            println!("{}", signer.sign(expired_at, &bucket));
        }
    }

    Ok(())
}
