#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use vibrato::SystemDictionaryBuilder;
use zip::ZipArchive;

const LEX_CSV: &str = "猫,0,0,100,名詞,一般,*,*,*,*,猫,ネコ,ネコ
犬,0,0,100,名詞,一般,*,*,*,*,犬,イヌ,イヌ
が,0,0,100,助詞,格助詞,一般,*,*,*,が,ガ,ガ
好き,0,0,100,名詞,形容動詞語幹,*,*,*,*,好き,スキ,スキ
走っ,0,0,100,動詞,自立,*,*,五段・ラ行,連用タ接続,走る,ハシッ,ハシッ";
const MATRIX_DEF: &str = "1 1\n0 0 0";
const CHAR_DEF: &str = "DEFAULT 0 0 1\nSPACE 0 1 0\n0x0020 SPACE";
const UNK_DEF: &str = "DEFAULT,0,0,100,記号,*,*,*,*,*,*\nSPACE,0,0,100,空白,*,*,*,*,*,*";

pub fn ttxml_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ttxml").unwrap();
    cmd.env_remove("TTXML_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Compile a tiny IPADIC-shaped vibrato dictionary into `dir/system.dic`
pub fn write_dictionary(dir: &Path) -> PathBuf {
    let dict = SystemDictionaryBuilder::from_readers(
        LEX_CSV.as_bytes(),
        MATRIX_DEF.as_bytes(),
        CHAR_DEF.as_bytes(),
        UNK_DEF.as_bytes(),
    )
    .unwrap();

    let path = dir.join("system.dic");
    let mut bytes = Vec::new();
    dict.write(&mut bytes).unwrap();
    fs::write(&path, bytes).unwrap();
    path
}

/// Write `dir/ttxml.toml` pointing at a fresh test dictionary, plus `extra` lines
pub fn write_project(dir: &Path, extra: &str) -> PathBuf {
    write_dictionary(dir);
    let path = dir.join("ttxml.toml");
    fs::write(
        &path,
        format!("{}\n[japanese]\ndictionary = \"system.dic\"\n", extra),
    )
    .unwrap();
    path
}

/// Member names of a zip archive, in archive order
pub fn archive_members(bytes: &[u8]) -> Vec<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

/// Contents of one archive member as a string
pub fn archive_member(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}
