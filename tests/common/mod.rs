//! Shared fixture: a faithful slice of a generated `all_*.js` shard,
//! overloaded constructors and HTML entities included.

pub const SAMPLE_SEARCHDATA: &str = r#"var searchData=
[
  ['image',['Image',['../classcl_1_1Image.html',1,'cl']]],
  ['image',['Image',['../classcl_1_1Image.html#ad9a2f4b6a5ccbb7056613946bc6ee0b7',1,'cl::Image::Image()'],['../classcl_1_1Image.html#a82281c4db166cafeb0dd5f48718eb879',1,'cl::Image::Image(const Image &amp;image)']]],
  ['image2d',['Image2D',['../classcl_1_1Image2D.html',1,'cl']]],
  ['image2d',['Image2D',['../classcl_1_1Image2D.html#ad82c72c6c7124a852dcfb4c3866d855e',1,'cl::Image2D::Image2D(const Context &amp;context, cl_mem_flags flags, ImageFormat format,::size_t width,::size_t height,::size_t row_pitch=0, void *host_ptr=NULL, cl_int *err=NULL)'],['../classcl_1_1Image2D.html#a6ef2c932d8846c4ad7205c5352df687a',1,'cl::Image2D::Image2D()'],['../classcl_1_1Image2D.html#ad70d8a756f02ddae3d557a91f2471862',1,'cl::Image2D::Image2D(const Image2D &amp;image2D)'],['../classcl_1_1Image2D.html#a4275ee4a87732d57e03440cc64fccd84',1,'cl::Image2D::Image2D(const cl_mem &amp;image2D)']]],
  ['imageformat',['ImageFormat',['../structcl_1_1ImageFormat.html',1,'cl']]]
];
"#;

/// An entry whose item list is missing entirely.
pub const MALFORMED_SEARCHDATA: &str = "var searchData=\n[\n  ['image']\n];\n";
