use std::{borrow::Cow, fs, time::UNIX_EPOCH};

use bindata::FileInfo;

#[allow(dead_code)]
mod compressed_zero_copy {
    bindata::include_bindata!("compressed_zero_copy.rs");
}

#[allow(dead_code)]
mod compressed_copy {
    bindata::include_bindata!("compressed_copy.rs");
}

#[allow(dead_code)]
mod uncompressed_zero_copy {
    bindata::include_bindata!("uncompressed_zero_copy.rs");
}

#[allow(dead_code)]
mod uncompressed_copy {
    bindata::include_bindata!("uncompressed_copy.rs");
}

const FILE_TXT: &[u8] = include_bytes!("../../blobs/file.txt");
const DATA_BIN: &[u8] = include_bytes!("../../blobs/nested/data.bin");
const TRICKY_TXT: &[u8] = include_bytes!("../../blobs/tricky.txt");

/// Checks one generated module directly and through the registry.
macro_rules! check {
    ($module:ident) => {{
        let file = $module::file_txt().expect("file.txt decodes");
        assert_eq!(file.bytes(), FILE_TXT);
        assert_eq!(file.info().name(), "file.txt");
        assert_eq!(file.info().size(), FILE_TXT.len() as u64);
        assert!(!file.info().is_dir());
        assert!(file.info().sys().is_none());
        assert_eq!(unix_seconds(file.info().mod_time()), modified("blobs/file.txt"));

        let data = $module::nested_data_bin_bytes().expect("data.bin decodes");
        assert_eq!(data.as_ref(), DATA_BIN);
        let tricky = $module::tricky_txt_bytes().expect("tricky.txt decodes");
        assert_eq!(tricky.as_ref(), TRICKY_TXT);
        assert_eq!(
            $module::asset_info("nested/data.bin").expect("info").size(),
            DATA_BIN.len() as u64
        );

        $module::register();
        assert_eq!(
            bindata::asset("file.txt").expect("registered").as_ref(),
            FILE_TXT
        );
        assert_eq!(
            bindata::asset("nested\\data.bin").expect("backslashes").as_ref(),
            DATA_BIN
        );
        assert_eq!(
            bindata::asset_names(),
            ["file.txt", "nested/data.bin", "tricky.txt"]
        );
        assert_eq!(
            bindata::asset_dir("").expect("root"),
            ["file.txt", "nested", "tricky.txt"]
        );
        assert_eq!(bindata::asset_dir("nested/").expect("nested"), ["data.bin"]);
        assert!(bindata::asset("missing.txt").is_err());
        assert!(bindata::asset_dir("file.txt").is_err());

        println!("{}: ok", stringify!($module));
    }};
}

fn unix_seconds(time: std::time::SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH).expect("after epoch").as_secs()
}

fn modified(path: &str) -> u64 {
    unix_seconds(
        fs::metadata(path)
            .and_then(|m| m.modified())
            .expect("blob is readable"),
    )
}

fn main() {
    let original_content = "Contents of file.txt\n";

    assert!(matches!(
        bindata::asset("file.txt"),
        Err(bindata::ReadError::NotRegistered)
    ));

    check!(compressed_zero_copy);
    check!(compressed_copy);
    check!(uncompressed_zero_copy);
    check!(uncompressed_copy);

    // Only the raw zero-copy encoding can lend out its static storage.
    assert!(matches!(
        uncompressed_zero_copy::file_txt_bytes(),
        Ok(Cow::Borrowed(_))
    ));
    assert!(matches!(
        uncompressed_copy::file_txt_bytes(),
        Ok(Cow::Owned(_))
    ));

    let data = bindata::asset("file.txt").expect("file.txt is registered");
    let s = std::str::from_utf8(&data).expect("data is not valid UTF-8");
    println!("{s}");
    assert_eq!(s, original_content);

    println!("Embedded data matches original.");
}
