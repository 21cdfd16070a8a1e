use std::io;

use qcloud::{Recipient, SendOptions, SmsCredentials, SmsSender};

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_id = required("QCLOUD_SMS_APP_ID")?.parse::<u64>()?;
    let app_key = required("QCLOUD_SMS_APP_KEY")?;
    let phone = required("QCLOUD_SMS_PHONE")?;
    let nation_code = std::env::var("QCLOUD_SMS_NATION_CODE").unwrap_or_else(|_| "86".to_owned());

    let client = SmsSender::new(SmsCredentials::new(app_id, app_key)?);
    let recipient = Recipient::from_parts(nation_code, phone);

    let result = match std::env::var("QCLOUD_SMS_TEMPLATE_ID") {
        Ok(template_id) => {
            let params: Vec<String> = std::env::var("QCLOUD_SMS_TEMPLATE_PARAMS")
                .map(|raw| raw.split(',').map(str::to_owned).collect())
                .unwrap_or_default();
            client
                .send_template(
                    recipient,
                    template_id.parse()?,
                    params,
                    std::env::var("QCLOUD_SMS_SIGN").ok(),
                    SendOptions::default(),
                )
                .await?
        }
        Err(_) => {
            let message = std::env::var("QCLOUD_SMS_MESSAGE")
                .unwrap_or_else(|_| "Hello from the qcloud demo.".to_owned());
            client
                .send_freeform(0, recipient, message, SendOptions::default())
                .await?
        }
    };

    println!(
        "result: {}, errmsg: {:?}, sid: {:?}, fee: {:?}",
        result.result, result.errmsg, result.sid, result.fee
    );

    Ok(())
}
