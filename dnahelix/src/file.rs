use std::{ffi::OsStr, path::PathBuf};

use clap::{builder::PathBufValueParser, error::ErrorKind};

/// Path that must point at an existing regular file, checked while parsing
/// arguments.
#[derive(Clone, Debug)]
pub struct ValidPathBuf(pub PathBuf);

impl clap::builder::ValueParserFactory for ValidPathBuf {
    type Parser = ValidPathBufParser;
    fn value_parser() -> Self::Parser {
        ValidPathBufParser
    }
}

#[derive(Clone)]
pub struct ValidPathBufParser;

impl clap::builder::TypedValueParser for ValidPathBufParser {
    type Value = ValidPathBuf;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let val = PathBufValueParser::new().parse_ref(cmd, arg, value)?;
        if !val.is_file() {
            let err = clap::Error::raw(
                ErrorKind::ValueValidation,
                format!("File {value:?} does not exist\n"),
            )
            .with_cmd(cmd);
            Err(err)
        } else {
            Ok(ValidPathBuf(val))
        }
    }
}
