use thiserror::Error;

/// 변환/파싱 중 발생 가능한 오류.
#[derive(Error, Debug)]
pub enum HumanizeError {
    /// 등록되지 않은 언어 코드
    #[error("지원하지 않는 언어: {0}")]
    UnsupportedLanguage(String),

    /// 숫자+단위(접두어) 패턴을 찾지 못함
    #[error("해석할 수 없는 입력: '{0}'")]
    NoMatch(String),

    /// 패턴에는 걸렸지만 표에 없는 접두어. 표와 패턴이 어긋났다는 뜻이다.
    #[error("표에 없는 접두어: '{0}'")]
    UnknownSuffix(String),

    /// 결과가 표현 가능한 범위를 벗어남
    #[error("범위를 벗어난 값: '{0}'")]
    OutOfRange(String),

    /// 표로부터 만든 정규식 컴파일 실패
    #[error("입력 패턴 생성 오류: {0}")]
    Pattern(#[from] regex::Error),
}

pub type HumanizeResult<T> = Result<T, HumanizeError>;
